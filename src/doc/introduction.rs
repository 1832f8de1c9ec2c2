/*!
# Introductory Tutorial for ByteBasic

ByteBasic comes as two programs. `basc` compiles a source file to a
bytecode file and `bas` runs the bytecode.

Every line of a program starts with a line number followed by one
statement. Words are separated by spaces.

```text
10 PRINT "HELLO WORLD"
20 FOR I = 1 TO 3
30 PRINT I
40 NEXT I
```

Save this as `hello.bas` and compile it.

<pre><code>&nbsp;$ basc -c hello.bas
&nbsp;Compiled to hello.bbcode
</code></pre>

Then run the bytecode.

<pre><code>&nbsp;$ bas -f hello.bbcode
&nbsp;HELLO WORLD
&nbsp;1
&nbsp;2
&nbsp;3
</code></pre>

Add `--trace` to see every instruction as it executes.
Stop a running program with CTRL-C.

Lines are compiled in the order they appear in the file, so keep
them in ascending order. Branches may refer to lines further down.

*/
